fn main() {
    slint_build::compile("ui/snapview.slint").unwrap();
}
