pub mod claim;
pub mod claim_by_admin_signature;
pub mod initialize;
pub mod set_admin_signer;
pub mod set_merkle_root;

pub use claim::*;
pub use claim_by_admin_signature::*;
pub use initialize::*;
pub use set_admin_signer::*;
pub use set_merkle_root::*;
