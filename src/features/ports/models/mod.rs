mod port;

pub use port::{join_list, split_list, PortCode, PortRecord};
