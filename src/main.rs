fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    dioxus::launch(stylecraft::ui::App);
}
