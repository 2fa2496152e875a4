use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use services::{ExamCommand, ExamController, ExamEvent, ExamSetup, TickFlow, Ticker};

#[tokio::test(start_paused = true)]
async fn ticker_fires_once_per_period_until_stopped() {
    let started = tokio::time::Instant::now();
    let mut seen = 0_u32;
    let delivered = Ticker::new(Duration::from_secs(1))
        .run(|| {
            seen += 1;
            if seen == 5 {
                TickFlow::Stop
            } else {
                TickFlow::Continue
            }
        })
        .await;

    assert_eq!(delivered, 5);
    assert_eq!(started.elapsed(), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn aborted_ticker_delivers_nothing_more() {
    let count = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&count);
    let handle = tokio::spawn(Ticker::new(Duration::from_secs(1)).run(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        TickFlow::Continue
    }));

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);

    handle.abort();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn ticker_drives_controller_until_completion() {
    let mut controller = ExamController::new();
    controller
        .apply(ExamCommand::Start(ExamSetup::new(1, 1)))
        .unwrap();

    let delivered = Ticker::default()
        .run(|| {
            let event = controller.tick();
            if event == ExamEvent::Ticked && controller.snapshot().total_remaining == 0 {
                let _ = controller.apply(ExamCommand::FinishQuestion);
                return TickFlow::Stop;
            }
            if event.ends_countdown() {
                TickFlow::Stop
            } else {
                TickFlow::Continue
            }
        })
        .await;

    assert_eq!(delivered, 60);
    assert_eq!(controller.run_state(), zimer_core::RunState::Finished);
}
