pub mod msg;

pub use msg::Message;
