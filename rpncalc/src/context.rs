use crate::error::{CalcError, CalcResult};
use crate::limits::{truncate_at_boundary, Limits};

/// Named constants visible to an evaluation. Lookup returns the first
/// entry registered under a name.
#[derive(Clone, Debug)]
pub struct MathContext {
    vars: Vec<(String, f64)>,
    limits: Limits,
}

impl Default for MathContext {
    fn default() -> MathContext {
        MathContext::new()
    }
}

impl MathContext {
    pub fn new() -> MathContext {
        MathContext::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> MathContext {
        let mut cx = MathContext { vars: Vec::new(), limits };
        cx.reset();
        cx
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Forget user variables, leaving only the built-in constants.
    pub fn reset(&mut self) {
        use std::f64::consts;
        self.vars.clear();
        self.setvar("pi", consts::PI);
        self.setvar("e", consts::E);
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        let mut name = var.to_string();
        truncate_at_boundary(&mut name, self.limits.max_var_name_len.saturating_sub(1));
        self.vars.push((name, val));
    }

    pub fn lookup(&self, var: &str) -> CalcResult<f64> {
        match self.vars.iter().find(|(name, _)| name == var) {
            Some(&(_, value)) => {
                log::trace!("found variable {} = {}", var, value);
                Ok(value)
            }
            None => Err(CalcError::UndefinedVariable(var.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
