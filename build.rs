//! Generates the Vigilio gRPC client stubs from the workspace proto contract.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/vigilio.proto");

    // Point prost at a vendored `protoc` so the build does not depend on a
    // system-installed protobuf compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            unsafe { std::env::set_var("PROTOC", protoc) };
        }
    }

    tonic_prost_build::configure()
        .build_server(false)
        .compile_protos(&["proto/vigilio.proto"], &["proto"])
        .expect("Failed to compile protobuf definitions");
}
