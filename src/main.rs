fn main() {
    if let Err(err) = pie_chart_renderer::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
