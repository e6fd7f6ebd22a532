//! Binary entrypoint: the browser-hosted widgets on wasm32, a config checker natively.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    site::check::run(std::env::args().skip(1))
}
