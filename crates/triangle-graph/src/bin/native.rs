fn main() -> eframe::Result<()> {
    triangle_graph::native::run()
}
