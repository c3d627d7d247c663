//! Word lists compiled into the binary by the build script

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/vocab.rs"));
