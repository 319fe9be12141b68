fn main() {
    speedb_build_info::app::startup::startup();
}
