
use crate::{
    testing::{Recorded, RecordingBackend},
    LogAdapter,
};

fn adapter() -> (LogAdapter<RecordingBackend>, RecordingBackend) {
    let backend = RecordingBackend::new();
    (LogAdapter::new(backend.clone()), backend)
}

fn last(backend: &RecordingBackend) -> Recorded {
    backend.last().expect("an entry should have been emitted")
}
