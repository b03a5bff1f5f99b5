fn main() {
    padlock::cli::run();
}
