pub mod catalog;
pub mod report;
pub mod resolver;
pub mod template;
