pub mod console;
pub mod subject_observer;
