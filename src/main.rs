fn main() {
    // launch sets up the tracing logger: debug in debug builds, info in release
    dioxus::launch(communion::App);
}
