// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_ops::numeric::parse_operand;
use decimal_ops::prelude::*;

/// Integer remainder, registered at runtime under "mod"
#[derive(Debug, Default)]
struct Modulus;

impl Operation for Modulus {
    fn name(&self) -> &str {
        "Modulus"
    }

    fn validate(&self, _a: Operand, b: Operand) -> OperationResult<()> {
        if b.is_zero() {
            return Err(OperationError::validation("Modulus by zero is not allowed"));
        }
        Ok(())
    }

    fn compute(&self, a: Operand, b: Operand) -> OperationResult<Operand> {
        Ok(a % b)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Decimal Operations Example ===\n");

    let a = parse_operand("5.5")?;
    let b = parse_operand("3.3")?;

    // Built-in operations by name
    for name in ["add", "Subtract", "MULTIPLY", "divide"] {
        let op = create_operation(name)?;
        println!("{:>14}: {} , {} = {}", op.name(), a, b, op.execute(a, b)?);
    }

    // Validation failures propagate unchanged
    println!("\n=== Division by zero ===");
    match create_operation("divide")?.execute(a, Operand::ZERO) {
        Ok(result) => println!("  unexpected result {}", result),
        Err(err) => println!("  {}", err),
    }

    // Unknown names keep the caller's spelling
    println!("\n=== Unknown operation ===");
    if let Err(err) = create_operation("Power") {
        println!("  {}", err);
    }

    // Runtime registration
    println!("\n=== Registering 'mod' ===");
    register::<Modulus>("mod")?;
    let op = create_operation("MOD")?;
    println!("  {}: 10 , 4 = {}", op, op.execute(Operand::from(10), Operand::from(4))?);

    // Rounded factory
    println!("\n=== Monetary factory ===");
    let factory = OperationFactory::from_config(&FactoryConfig::monetary())?;
    let third = factory.evaluate("divide", Operand::ONE, Operand::from(3))?;
    println!("  1 / 3 = {}", third);
    println!("  registered: {:?}", factory.operation_names());

    Ok(())
}
