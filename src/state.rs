use crate::catalog::TICK_PERIOD;
use crate::engine::TimerEngine;
use crate::models::{StatsResponse, StatusResponse};
use crate::sink::NoticeBoard;
use crate::ticker::Ticker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<TimerEngine>>,
    ticker: Arc<Mutex<Ticker>>,
    notices: NoticeBoard,
}

impl AppState {
    pub fn new(engine: TimerEngine, notices: NoticeBoard) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            ticker: Arc::new(Mutex::new(Ticker::default())),
            notices,
        }
    }

    // The ticker lock is held across each transition so concurrent requests
    // cannot leave the ticker and the engine state disagreeing.
    pub async fn start(&self) {
        let mut ticker = self.ticker.lock().await;
        let started = self.engine.lock().await.start();
        if started {
            let engine = Arc::clone(&self.engine);
            ticker.start(TICK_PERIOD, move || {
                let engine = Arc::clone(&engine);
                async move {
                    engine.lock().await.tick();
                }
            });
        }
    }

    pub async fn pause(&self) {
        let mut ticker = self.ticker.lock().await;
        ticker.stop();
        self.engine.lock().await.pause();
    }

    pub async fn reset(&self) {
        let mut ticker = self.ticker.lock().await;
        ticker.stop();
        self.engine.lock().await.reset();
    }

    pub async fn shutdown(&self) {
        let mut ticker = self.ticker.lock().await;
        ticker.stop();
        self.engine.lock().await.shutdown();
    }

    pub async fn status(&self) -> StatusResponse {
        let mut status = self.engine.lock().await.snapshot();
        status.unlocked = self.notices.drain();
        status
    }

    pub async fn snapshot(&self) -> StatusResponse {
        self.engine.lock().await.snapshot()
    }

    pub async fn stats(&self) -> StatsResponse {
        self.engine.lock().await.stats()
    }
}
