mod exam_vm;

pub use exam_vm::{ExamNotice, ExamVm, map_exam_snapshot};
