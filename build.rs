fn main() {
    // Version info for the Windows executable
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Crosshair Overlay");
        res.set("FileDescription", "Click-through crosshair overlay");
        res.set("LegalCopyright", "Copyright (c) 2024");
        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to compile Windows resources: {e}");
        }
    }
}
