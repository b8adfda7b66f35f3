#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate typenum;

pub mod abc;
pub mod dense;
pub mod err;
pub mod pwm;
pub mod sample;
pub mod seq;

pub use abc::Alphabet;
pub use abc::Background;
pub use abc::Dna;
pub use abc::Nucleotide;
pub use abc::Symbol;
pub use dense::DenseTable;
pub use err::Error;
pub use err::InvalidSymbol;
pub use pwm::relative_individual_information;
pub use pwm::WeightMatrix;
pub use sample::ListSample;
pub use sample::ModelSample;
pub use sample::Sample;
pub use seq::EncodedSequence;
