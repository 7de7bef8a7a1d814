// Domain layer: the question/choice model. No I/O.

pub mod model;
