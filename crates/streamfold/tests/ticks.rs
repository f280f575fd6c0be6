//! Market-tick scenario: staged turnover windows and a window over
//! low / high / turnover, driven from one root.

use std::time::Duration;
use streamfold::prelude::*;
use streamfold::Keyed;

#[derive(Clone, Debug, PartialEq)]
struct Tick {
    time: Duration,
    low: f64,
    high: f64,
    avg_price: f64,
    trades: u32,
}

impl Tick {
    fn at(i: u64) -> Self {
        let p = i as f64;
        Self {
            time: Duration::from_secs(i),
            low: p - 1.0,
            high: p + 1.0,
            avg_price: p,
            trades: 2,
        }
    }

    fn time(&self) -> Duration {
        self.time
    }
}

fn turnover(t: &Tick) -> f64 {
    t.avg_price * f64::from(t.trades)
}

fn get_low(t: &Tick) -> f64 {
    t.low
}

fn get_high(t: &Tick) -> f64 {
    t.high
}

type TickWindow = DurationWindow<Tick, Keyed<fn(&Tick) -> Duration>>;

fn one_second() -> TickWindow {
    DurationWindow::keyed(Duration::from_secs(1), Tick::time as fn(&Tick) -> Duration).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seconds(window: &TickWindow) -> Vec<u64> {
    window.iter().map(|t| t.time.as_secs()).collect()
}

#[test]
fn test_tick_scenario() {
    init_tracing();

    let (mut w1, mut w2, mut w3, mut wx1) = (one_second(), one_second(), one_second(), one_second());
    let (mut sum1, mut sum2, mut sum3) = (Sum::<f64>::new(), Sum::<f64>::new(), Sum::<f64>::new());
    let (mut sumx1, mut sumx2) = (Sum::<f64>::new(), Sum::<f64>::new());
    let mut low = Low::new();
    let mut high = High::new();

    {
        let staged = (&mut w1)
            .sync(sub(transform(turnover).sync(&mut sum1)))
            .pipe((&mut w2).sync(sub(transform(turnover).sync(&mut sum2))))
            .pipe(sub((&mut w3).map(turnover).sync(&mut sum3)));

        let summary = (&mut wx1).sync(parallel![
            transform(get_low).sync(&mut low),
            transform(get_high).sync(&mut high),
            transform(turnover).sync(&mut sumx1),
            relay().map(turnover).sync(&mut sumx2),
        ]);

        let mut pipeline = Pipeline::new(parallel(staged, summary));
        for i in 0..10 {
            pipeline.push(&Tick::at(i));
        }
        assert_eq!(pipeline.pushed(), 10);
    }

    assert_eq!(seconds(&w1), [8, 9]);
    assert_eq!(seconds(&w2), [6, 7]);
    assert_eq!(seconds(&w3), [4, 5]);
    assert_eq!(seconds(&wx1), [8, 9]);
    assert!(w1.filled() && w2.filled() && w3.filled());

    assert_eq!(sum1.sum(), 34.0);
    assert_eq!(sum2.sum(), 26.0);
    assert_eq!(sum3.sum(), 18.0);

    assert_eq!(low.value(), Some(&7.0));
    assert_eq!(high.value(), Some(&10.0));
    assert_eq!(low.high(), Some(&8.0));
    assert_eq!(high.low(), Some(&9.0));
    assert_eq!(sumx1.sum(), 34.0);
    assert_eq!(sumx2.sum(), 34.0);
}

#[test]
fn test_partial_stream() {
    let mut w1 = one_second();
    let mut w2 = one_second();
    let mut sum2 = Sum::<f64>::new();

    {
        let mut root = (&mut w1).pipe((&mut w2).map(turnover).sync(&mut sum2));
        for i in 0..3 {
            root.push(&Tick::at(i));
        }
    }

    // Only tick 0 has left the first window so far.
    assert_eq!(seconds(&w1), [1, 2]);
    assert_eq!(seconds(&w2), [0]);
    assert!(!w2.filled());
    assert_eq!(sum2.sum(), 0.0);
    assert_eq!(w1.current_window_size(), Duration::from_secs(1));
}
