pub mod assemble;
pub mod finish;
pub mod generate;
pub mod query;
pub mod sample;

pub use assemble::AssembleStep;
pub use generate::Generate;
pub use sample::{CurveRange, CurveSamples, SampleCurves};
