fn main() -> anyhow::Result<()> {
    oai_installer::run()
}
