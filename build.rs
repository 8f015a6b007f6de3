fn main() {
    // Askama reads `templates/index.html` at compile time.
    println!("cargo:rerun-if-changed=templates");
}
