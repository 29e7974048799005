pub mod shell;

pub use shell::{SessionEnd, Shell};
