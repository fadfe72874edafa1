//! Basic usage example - configure the process for an R binding

use rbridge::Result;

fn main() -> Result<()> {
    println!("Configuring R runtime environment...");

    let report = rbridge::configure()?;

    println!("R home:         {}", report.home.display());
    println!("rJava package:  {}", report.adapter_dir.display());
    println!("JRI libraries:  {}", report.native_dir.display());
    println!(
        "{} {}",
        report.library_path_var,
        if report.library_path_appended {
            "was extended"
        } else {
            "already contained the JRI directory"
        }
    );

    // An embedded R engine started from here can now resolve its
    // native libraries by name and will see R_HOME set.
    Ok(())
}
