//! Provides the `outlook-inspect` tool for dumping a default folder.
//!
//! Usage: `outlook-inspect [folder_code]`
//!
//! Connects to a running Outlook (launching one if needed), opens the MAPI
//! namespace, fetches the default folder with the given code (6 = Inbox,
//! the default), and prints a snapshot of its mapped properties.
//!
//! # Examples
//! ```text
//! outlook-inspect        # Inbox
//! outlook-inspect 16     # Drafts
//! ```

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let folder_code: i32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);
    process::exit(run(folder_code));
}

#[cfg(windows)]
fn run(folder_code: i32) -> i32 {
    use outlook_dispatch::enums::OlDefaultFolders;
    use outlook_dispatch::objects::Application;

    let folder_type = match OlDefaultFolders::try_from(folder_code) {
        Ok(folder_type) => folder_type,
        Err(code) => {
            eprintln!("Error: {code} is not a default folder code");
            return 1;
        }
    };

    let result = (|| {
        let app = Application::connect()?;
        let namespace = app.get_namespace("MAPI")?;
        let folder = namespace.get_default_folder(folder_type)?;
        eprintln!("{} / {:?}", app.name()?, folder_type);
        print!("{}", folder.snapshot()?);
        Ok::<(), outlook_dispatch::FacadeError>(())
    })();

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            1
        }
    }
}

#[cfg(not(windows))]
fn run(_folder_code: i32) -> i32 {
    eprintln!("outlook-inspect drives the Outlook COM automation model and only runs on Windows.");
    2
}
