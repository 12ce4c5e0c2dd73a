use anyhow::Context;

fn main() -> anyhow::Result<()> {
    temple_album::run().context("temple-album session failed")
}
