//! Кооперативный однопоточный цикл событий шелла.
//!
//! Всё состояние читается и мутируется одной логической задачей: цикл
//! снимает события из очереди и прогоняет их через store. Единственное
//! временнОе поведение - авто-переход splash-экрана: sleep-future взводится
//! только пока splash является текущим destination и уничтожается в момент
//! смены destination - drop future и есть отмена, отдельного токена нет.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::routes::ScreenRoute;
use crate::shell::store::{ShellEvent, ShellStore};

pub struct ShellRuntime {
    store: ShellStore,
    events: mpsc::UnboundedReceiver<ShellEvent>,
    splash_duration: Duration,
}

impl ShellRuntime {
    pub fn new(
        store: ShellStore,
        splash_duration: Duration,
    ) -> (Self, mpsc::UnboundedSender<ShellEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                store,
                events: rx,
                splash_duration,
            },
            tx,
        )
    }

    pub fn store(&self) -> &ShellStore {
        &self.store
    }

    /// Крутит цикл до закрытия канала событий; возвращает итоговый store.
    pub async fn run(mut self) -> ShellStore {
        self.run_splash_phase().await;
        while let Some(event) = self.events.recv().await {
            self.store.dispatch(event);
        }
        tracing::info!("event channel closed, shell loop finished");
        self.store
    }

    /// Фаза splash: таймер живёт внутри этой функции и уничтожается вместе
    /// с ней, как только destination перестаёт быть splash.
    async fn run_splash_phase(&mut self) {
        if self.store.current_route().route != ScreenRoute::Splash {
            return;
        }
        tracing::debug!(delay_ms = self.splash_duration.as_millis() as u64, "arming splash timer");
        let timer = sleep(self.splash_duration);
        tokio::pin!(timer);

        loop {
            if self.store.current_route().route != ScreenRoute::Splash {
                tracing::debug!("destination changed, splash timer dropped");
                return;
            }
            tokio::select! {
                _ = &mut timer => {
                    self.store.dispatch(ShellEvent::SplashFinished);
                    return;
                }
                maybe = self.events.recv() => match maybe {
                    Some(event) => self.store.dispatch(event),
                    None => return,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data;
    use crate::shell::tabs::TabKey;
    use std::sync::Arc;

    fn runtime(splash_ms: u64) -> (ShellRuntime, mpsc::UnboundedSender<ShellEvent>) {
        let catalog = Arc::new(data::seed_catalog().unwrap());
        let store = ShellStore::new(catalog, "Dreamy Bloom");
        ShellRuntime::new(store, Duration::from_millis(splash_ms))
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_auto_advances_after_delay() {
        let (runtime, tx) = runtime(2000);
        let handle = tokio::spawn(runtime.run());

        // Виртуальное время: таймер (2000мс) срабатывает до этого sleep.
        tokio::time::sleep(Duration::from_millis(2001)).await;
        drop(tx);

        let store = handle.await.unwrap();
        assert_eq!(store.current_route().route, ScreenRoute::Login);
        assert_eq!(store.root_stack().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_away_cancels_timer_and_discards_late_event() {
        let (runtime, tx) = runtime(2000);
        let handle = tokio::spawn(runtime.run());

        // Уходим со splash до истечения таймера.
        tx.send(ShellEvent::NavigateTo {
            path: "login_screen".to_string(),
        })
        .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Таймер уже уничтожен; даже явное опоздавшее событие отбрасывается.
        tokio::time::sleep(Duration::from_millis(3000)).await;
        tx.send(ShellEvent::SplashFinished).unwrap();
        drop(tx);

        let store = handle.await.unwrap();
        assert_eq!(store.current_route().route, ScreenRoute::Login);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_session_through_the_loop() {
        let (runtime, tx) = runtime(100);
        let handle = tokio::spawn(runtime.run());
        tokio::time::sleep(Duration::from_millis(101)).await;

        for event in [
            ShellEvent::NavigateTo {
                path: "home_screen".to_string(),
            },
            ShellEvent::HomeSearchChanged("serum".to_string()),
            ShellEvent::SelectTab(TabKey::Products),
            ShellEvent::NavigateTo {
                path: "product_detail_screen/101".to_string(),
            },
            ShellEvent::Back,
            ShellEvent::SelectTab(TabKey::Home),
        ] {
            tx.send(event).unwrap();
        }
        drop(tx);

        let store = handle.await.unwrap();
        assert_eq!(store.current_route().route, ScreenRoute::Home);
        assert_eq!(store.active_tab(), TabKey::Home);
        // Строка поиска пережила переключения табов и карточку товара.
        let json = serde_json::to_value(store.view()).unwrap();
        assert_eq!(json["view"]["search_query"], "serum");
    }
}
