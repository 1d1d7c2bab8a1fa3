pub fn main() {
    // 仅固件构建需要 cortex-m / defmt 链接脚本，主机测试不链接
    if std::env::var_os("CARGO_FEATURE_FIRMWARE").is_none() {
        return;
    }

    // defmt 配置
    println!("cargo:rerun-if-env-changed=DEFMT_LOG");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
}
