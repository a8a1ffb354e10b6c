#[cfg(feature = "tracing")]
#[inline(always)]
pub fn __trace_write(args: std::fmt::Arguments<'_>) {
    if let Ok(mut tracer) = crate::vcs::tracer::TRACER.lock() {
        tracer.write(args.to_string());
    }
}

#[macro_export]
macro_rules! trace_bank {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::vcs::tracer::macros::__trace_write(
                format_args!("[BANK] {}", format_args!($($arg)*))
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    };
}

#[macro_export]
macro_rules! trace_dump {
    () => {
        #[cfg(feature = "tracing")]
        {
            if let Ok(tracer) = $crate::vcs::tracer::TRACER.lock() {
                tracer.print();
            }
        }
    };
}
