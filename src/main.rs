use iced_toast::app::{App, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args
            .opt_value_from_str::<_, PathBuf>("--config")
            .unwrap_or(None),
    };

    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .subscription(App::subscription)
        .title("iced_toast demo")
        .window_size(iced::Size::new(560.0, 420.0))
        .run()
}
