fn main() -> eyre::Result<()> {
    icongen::run()
}
