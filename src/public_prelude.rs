//! The crate prelude: reexport the most essential utilities so that blob
//! `use`-ing them should enable the most straight-forward usage.

pub use {
    ::yield_gen_proc_macros::{
        generator,
    },
    crate::{
        error::GeneratorError,
        generator::Generator,
        producer::Producer,
        worker::Emitter,
    },
};
