/// Prints the headless-monitor logo with version.
pub fn print_logo() {
    let c = "\x1b[94m"; // Bright blue — logo
    let d = "\x1b[90m"; // Dim gray — version
    let r = "\x1b[0m"; // Reset
    let v = env!("CARGO_PKG_VERSION");

    println!();
    println!("  {c}┌──────────┐{r}");
    println!("  {c}│ ▄▄    ▄▄ │  headless-monitor{r}");
    println!("  {c}│ ▀▀ ▄▄ ▀▀ │{r}  {d}v{v}{r}");
    println!("  {c}└────┬┬────┘{r}");
}
