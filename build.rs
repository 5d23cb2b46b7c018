use shadow_rs::ShadowBuilder;

fn main() {
    // Generate build metadata for `--version` output
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
