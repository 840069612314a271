pub mod sampler;
pub mod volume;
pub mod xform_freq;
