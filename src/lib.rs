pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod features;
pub mod oracle;
pub mod scorer;
pub mod segmenter;
// cmd, reports and input are binary modules (see main.rs).
