pub mod guest_handlers;
pub mod intention_handlers;
