use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_poller(period: Duration) -> (PollHandle, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let ticks = Arc::clone(&count);
    let handle = spawn_poller(period, move || {
        let ticks = Arc::clone(&ticks);
        async move {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    });
    (handle, count)
}

#[tokio::test(start_paused = true)]
async fn first_tick_is_immediate() {
    let (_handle, count) = counting_poller(Duration::from_secs(3));
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_period() {
    let (_handle, count) = counting_poller(Duration::from_secs(1));
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    // t = 0, 1, 2, 3
    assert_eq!(count.load(Ordering::SeqCst), 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_stops_ticks() {
    let (handle, count) = counting_poller(Duration::from_secs(1));
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let before = count.load(Ordering::SeqCst);
    assert!(before >= 2);

    drop(handle);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), before);
}

#[tokio::test(start_paused = true)]
async fn stop_ends_the_loop() {
    let (handle, count) = counting_poller(Duration::from_millis(500));
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.stop();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_ticks_do_not_delay_the_next_one() {
    let started = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&started);
    let _handle = spawn_poller(Duration::from_secs(1), move || {
        let seen = Arc::clone(&seen);
        async move {
            seen.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    });

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(started.load(Ordering::SeqCst), 3);
}
