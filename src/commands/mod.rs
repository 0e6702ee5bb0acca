// Commands module - exports the operation layer

pub mod task;
