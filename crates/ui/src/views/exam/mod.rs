mod intent;
mod ticks;
mod view;

pub use intent::ExamIntent;
pub use view::ExamView;

#[cfg(test)]
pub(crate) use ticks::deliver_tick;
#[cfg(test)]
pub(crate) use view::ExamTestHandles;
