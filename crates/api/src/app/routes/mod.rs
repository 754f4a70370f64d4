pub mod receipts;
pub mod system;
