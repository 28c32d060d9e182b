use playdeck::cli::run;

fn main() {
    run();
}
