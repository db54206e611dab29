/// Binary entrypoint for the `addrof` executable.
///
/// Keeps the binary thin — all logic lives in the `addrof_lib` crate so
/// tests and benches can import it directly.
fn main() {
    addrof_lib::run();
}
