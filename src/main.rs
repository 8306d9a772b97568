fn main() {
    aoc_scaffold::app::cli::run();
}
