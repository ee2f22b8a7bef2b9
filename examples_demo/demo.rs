use service_logger::{fields, EmitError, ServiceLogger};

fn main() -> Result<(), EmitError> {
    let logger = ServiceLogger::new("new-service");

    logger.debug(fields!["msg" => "This is a debug message"])?;
    logger.info(fields!["msg" => "This is an info message"])?;
    logger.stage(fields!["msg" => "This is a stage message"])?;
    logger.warn(fields!["msg" => "This is a warn message"])?;
    logger.err(fields!["msg" => "This is an error message"])?;
    logger.crit(fields!["msg" => "This is a critical message (followed by an empty line)"])?;

    println!();
    println!("Message-only helpers put their argument under the 'msg' key:");
    logger.debug_msg("This is a demonstration of debug_msg().")?;
    logger.info_msg("This is a demonstration of info_msg().")?;
    logger.stage_msg("This is a demonstration of stage_msg().")?;
    logger.warn_msg("This is a demonstration of warn_msg().")?;
    logger.err_msg("This is a demonstration of err_msg().")?;
    logger.crit_msg("This is a demonstration of crit_msg() (followed by an empty line).")?;

    println!();
    println!("Derived loggers carry extra fields:");
    let component = logger.with(fields!["component" => "with"]);
    component.debug(fields!["msg" => "This is a debug message with a component (with())"])?;
    component.debug_msg("This is a demonstration of debug_msg() with a component (with())")?;

    println!();
    println!("You can also have prefixes:");
    let request = logger.with_prefix(fields!["request" => "[f637463:demo]"]);
    request.debug(fields!["msg" => "This is a debug message - with_prefix()"])?;
    println!();

    Ok(())
}
