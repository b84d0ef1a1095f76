//! A scripted analysis engine that records how often it is called.
//!
//! The engine reacts to marker words in the script text:
//! `DECLARE_ERROR` (declaration), `UNDEFINED` and `CHAINED` (semantic),
//! `SYNTAX_ERROR` (syntactic) and `ENGINE_CRASH` (semantic failure).

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use quill_host::{
    AnalysisEngine, AnalysisHost, CompletionEntry, EngineDiagnostic, EngineError, MessageChain,
};

use crate::resolver::EngineProvider;

#[derive(Debug, Default)]
struct Calls {
    engines: usize,
    declaration: usize,
    semantic: usize,
    syntactic: usize,
    completions: usize,
}

/// Call counters shared between a test and the engines it hands out.
#[derive(Clone, Debug, Default)]
pub(crate) struct CallLog(Rc<RefCell<Calls>>);

impl CallLog {
    pub(crate) fn engines_created(&self) -> usize {
        self.0.borrow().engines
    }

    pub(crate) fn declaration(&self) -> usize {
        self.0.borrow().declaration
    }

    pub(crate) fn semantic(&self) -> usize {
        self.0.borrow().semantic
    }

    pub(crate) fn syntactic(&self) -> usize {
        self.0.borrow().syntactic
    }

    pub(crate) fn completions(&self) -> usize {
        self.0.borrow().completions
    }

    /// All query calls, excluding engine creation.
    pub(crate) fn engine_calls(&self) -> usize {
        let calls = self.0.borrow();
        calls.declaration + calls.semantic + calls.syntactic + calls.completions
    }
}

pub(crate) struct ScriptedEngine {
    log: CallLog,
}

pub(crate) fn scripted_engine(log: &CallLog) -> Box<dyn AnalysisEngine> {
    Box::new(ScriptedEngine { log: log.clone() })
}

pub(crate) fn scripted_provider(log: &CallLog) -> Box<dyn EngineProvider> {
    let log = log.clone();
    Box::new(move |_root: &Path| -> Box<dyn AnalysisEngine> {
        log.0.borrow_mut().engines += 1;
        scripted_engine(&log)
    })
}

fn source_text(host: &dyn AnalysisHost, file: &Path) -> Result<String, EngineError> {
    host.script_snapshot(file)
        .map(|s| s.text().to_string())
        .ok_or_else(|| EngineError::MissingSource(file.to_path_buf()))
}

fn marker(text: &str, file: &Path, word: &str, code: u32, message: &str) -> Vec<EngineDiagnostic> {
    text.find(word)
        .map(|offset| vec![EngineDiagnostic::new(code, message).at(file, offset)])
        .unwrap_or_default()
}

impl AnalysisEngine for ScriptedEngine {
    fn declaration_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        self.log.0.borrow_mut().declaration += 1;
        let text = source_text(host, file)?;
        Ok(marker(&text, file, "DECLARE_ERROR", 4025, "Exported variable has or is using private name."))
    }

    fn semantic_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        self.log.0.borrow_mut().semantic += 1;
        let text = source_text(host, file)?;
        if text.contains("ENGINE_CRASH") {
            return Err(EngineError::Internal("scripted crash".into()));
        }
        let mut found = marker(&text, file, "UNDEFINED", 2304, "Cannot find name 'UNDEFINED'.");
        if text.contains("CHAINED") {
            let chain = MessageChain::new("Type 'A' is not assignable to type 'B'.")
                .with_next(MessageChain::new("Property 'x' is missing."));
            found.push(EngineDiagnostic::new(2322, chain));
        }
        Ok(found)
    }

    fn syntactic_diagnostics(
        &mut self,
        host: &dyn AnalysisHost,
        file: &Path,
    ) -> Result<Vec<EngineDiagnostic>, EngineError> {
        self.log.0.borrow_mut().syntactic += 1;
        let text = source_text(host, file)?;
        Ok(marker(&text, file, "SYNTAX_ERROR", 1005, "';' expected."))
    }

    fn completions(
        &mut self,
        _host: &dyn AnalysisHost,
        _file: &Path,
        _offset: usize,
    ) -> Result<Vec<CompletionEntry>, EngineError> {
        self.log.0.borrow_mut().completions += 1;
        Ok(vec![
            CompletionEntry::new("zeta", "var", "1"),
            CompletionEntry::new("alpha", "keyword", "1"),
            CompletionEntry::new("beta", "var", "0"),
        ])
    }
}
