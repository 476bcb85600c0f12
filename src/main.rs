use hygiene_records::{
    config::{get_config, init_config},
    logging,
    server::ServerHandle,
};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Task};
use tracing::{info, warn};

/// Desktop control window. Holds no domain state; it only starts/stops the
/// server and opens the browser.
struct Launcher {
    url: String,
    server: Option<ServerHandle>,
}

#[derive(Debug, Clone)]
enum Message {
    OpenBrowser,
    Stop,
}

impl Launcher {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenBrowser => {
                open_browser(&self.url);
                Task::none()
            }
            Message::Stop => {
                if let Some(server) = self.server.take() {
                    server.stop();
                }
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("Информационная система запущена").size(18),
            text(self.url.clone()),
            row![
                button("Открыть в браузере").on_press(Message::OpenBrowser),
                button("Завершить работу").on_press(Message::Stop),
            ]
            .spacing(16),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center);

        container(content).center(iced::Length::Fill).into()
    }
}

fn open_browser(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        warn!(error = ?e, "failed to open browser");
    }
}

fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    let _log_guard = logging::init(&config.log_dir)?;

    let server = ServerHandle::start()?;
    let url = config.server_url();
    info!("Records system available at {}", url);

    open_browser(&url);

    iced::application("Гигиеническое обучение — ИС", Launcher::update, Launcher::view)
        .window_size((420.0, 170.0))
        .run_with(move || {
            (
                Launcher {
                    url,
                    server: Some(server),
                },
                Task::none(),
            )
        })?;

    Ok(())
}
