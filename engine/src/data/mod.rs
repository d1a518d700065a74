// Static word tables. Nothing here is mutated after compilation.
pub mod lexicon;
pub mod ordinals;
