#![doc = r#"
marmot-batch — drive a pre-built MarMoT jar over a manifest of languages.

For every language in a JSON manifest this crate runs MarMoT's `Stats`
command and, on request, its `Trainer` command, checking exit statuses and
that the trained model file was written. The jar itself is an opaque external
tool; this crate only finds it, builds argument vectors, and runs it.

Manifest format
---------------
```json
[
  {"lang": "en", "marmot-indexes": "form-index=0,tag-index=1", "cis-path": "en/train.tsv"},
  {"lang": "de", "marmot-indexes": "form-index=0,tag-index=1", "cis-path": "de/train.tsv"}
]
```

Each entry becomes `-train-file <marmot-indexes>,<cis-path>`.

Quick start: run a batch
------------------------
```rust,no_run
use marmot_batch::{run_batch, RunParams, SystemRunner};

fn main() -> marmot_batch::Result<()> {
    let params = RunParams {
        train: true,
        ..RunParams::default()
    };

    let report = run_batch(&params, &mut SystemRunner, &mut std::io::stdout())?;
    println!("processed={} trained={}", report.processed, report.trained.len());
    Ok(())
}
```

Driving single steps
--------------------
```rust,no_run
use std::path::Path;
use marmot_batch::{locate_artifact, run_stats, Manifest, SystemRunner, Toolchain};

fn main() -> marmot_batch::Result<()> {
    let jar = locate_artifact(Path::new("/opt/marmot"))?;
    let toolchain = Toolchain::new("java", jar);
    let manifest = Manifest::load(Path::new("data.json"))?;
    for entry in manifest.entries()? {
        run_stats(&mut SystemRunner, &toolchain, &entry)?;
    }
    Ok(())
}
```

Error handling
--------------
Every failure aborts the batch. Match on `marmot_batch::Error` to tell them
apart:

```rust,no_run
use marmot_batch::{run_batch, Error, RunParams, SystemRunner};

fn main() {
    match run_batch(&RunParams::default(), &mut SystemRunner, &mut std::io::stdout()) {
        Ok(_) => {}
        Err(Error::ArtifactNotFound { dir }) => eprintln!("no jar in {}", dir.display()),
        Err(Error::ExternalProcess { class, lang, code }) => {
            eprintln!("{class} failed for {lang}: {code:?}")
        }
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — batch entry points and `BatchReport`.
- [`core`] — `RunParams` and the Stats/Trainer invokers.
- [`io`] — jar locator and manifest loader.
- [`types`] — `ToolClass` and `ExitOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::invoke::{
    Invocation, ProcessRunner, SystemRunner, Toolchain, run_stats, run_train,
};
pub use crate::core::params::RunParams;
pub use error::{Error, Result};
pub use io::{LanguageEntry, Manifest, locate_artifact, record_lang};
pub use types::{ExitOutcome, ToolClass};

pub use api::{BatchReport, process_entries, run_batch, select_entries};
