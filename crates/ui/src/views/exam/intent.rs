/// User actions on the exam page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Start,
    TogglePause,
    FinishQuestion,
    Reset,
}
