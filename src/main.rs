fn main() {
    fragment_gen::app::cli::run();
}
