//! Indented tree dump of a parsed program, for debugging and `slc --emit ast`.

use crate::ast::*;

const STEP: usize = 2;

pub fn dump_program(p: &Program) -> String {
    let mut out = String::from("Program\n");
    for f in &p.functions {
        dump_function(f, STEP, &mut out);
    }
    out
}

fn line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&" ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

fn dump_function(f: &Function, indent: usize, out: &mut String) {
    let params = f
        .params
        .iter()
        .map(|p| match p.ty {
            Some(ty) => format!("{} {}", ty.keyword(), p.name),
            None => p.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    line(
        out,
        indent,
        &format!("Function {} {}({})", f.return_type.keyword(), f.name, params),
    );
    dump_block(&f.body, indent + STEP, out);
}

fn dump_block(block: &Block, indent: usize, out: &mut String) {
    for s in block {
        dump_stmt(s, indent, out);
    }
}

fn dump_decl(d: &VariableDecl, indent: usize, out: &mut String) {
    line(out, indent, &format!("VariableDecl {} {}", d.ty.keyword(), d.name));
    dump_expr(&d.init, indent + STEP, out);
}

fn dump_stmt(s: &Stmt, indent: usize, out: &mut String) {
    let inner = indent + STEP;
    match s {
        Stmt::Expr(e) => {
            line(out, indent, "ExpressionStatement");
            dump_expr(e, inner, out);
        }
        Stmt::VariableDecl(d) => dump_decl(d, indent, out),
        Stmt::Return(e) => {
            line(out, indent, "Return");
            if let Some(e) = e {
                dump_expr(e, inner, out);
            }
        }
        Stmt::For { init, cond, step, body } => {
            line(out, indent, "For");
            if let Some(d) = init {
                line(out, inner, "init:");
                dump_decl(d, inner + STEP, out);
            }
            if let Some(c) = cond {
                line(out, inner, "cond:");
                dump_expr(c, inner + STEP, out);
            }
            line(out, inner, "step:");
            dump_expr(step, inner + STEP, out);
            line(out, inner, "body:");
            dump_block(body, inner + STEP, out);
        }
        Stmt::While { cond, body } => {
            line(out, indent, "While");
            line(out, inner, "cond:");
            dump_expr(cond, inner + STEP, out);
            line(out, inner, "body:");
            dump_block(body, inner + STEP, out);
        }
        Stmt::If { branches, else_body } => {
            line(out, indent, "If");
            for (i, b) in branches.iter().enumerate() {
                line(out, inner, if i == 0 { "if:" } else { "elif:" });
                dump_expr(&b.cond, inner + STEP, out);
                line(out, inner, "then:");
                dump_block(&b.body, inner + STEP, out);
            }
            if let Some(body) = else_body {
                line(out, inner, "else:");
                dump_block(body, inner + STEP, out);
            }
        }
        Stmt::Switch { scrutinee, cases, default } => {
            line(out, indent, "Switch");
            dump_expr(scrutinee, inner, out);
            for c in cases {
                line(out, inner, &format!("case {}:", c.value));
                dump_block(&c.body, inner + STEP, out);
            }
            if let Some(body) = default {
                line(out, inner, "default:");
                dump_block(body, inner + STEP, out);
            }
        }
        Stmt::Break => line(out, indent, "Break"),
        Stmt::Continue => line(out, indent, "Continue"),
        Stmt::Print { format, args } => {
            line(out, indent, &format!("Print {:?}", format));
            for a in args {
                dump_expr(a, inner, out);
            }
        }
    }
}

fn dump_expr(e: &Expr, indent: usize, out: &mut String) {
    let inner = indent + STEP;
    match e {
        Expr::Null => line(out, indent, "Null"),
        Expr::Bool(b) => line(out, indent, &format!("Bool {}", b)),
        Expr::Int(n) => line(out, indent, &format!("Int {}", n)),
        Expr::Double(d) => line(out, indent, &format!("Double {}", d)),
        Expr::String(s) => line(out, indent, &format!("String {:?}", s)),
        Expr::Void => line(out, indent, "Void"),
        Expr::Array(n) => line(out, indent, &format!("Array [{}]", n)),
        Expr::GetVariable(name) => line(out, indent, &format!("GetVariable {}", name)),
        Expr::SetVariable { name, value } => {
            line(out, indent, &format!("SetVariable {}", name));
            dump_expr(value, inner, out);
        }
        Expr::GetElement { target, index } => {
            line(out, indent, "GetElement");
            dump_expr(target, inner, out);
            dump_expr(index, inner, out);
        }
        Expr::SetElement { target, index, value } => {
            line(out, indent, "SetElement");
            dump_expr(target, inner, out);
            dump_expr(index, inner, out);
            dump_expr(value, inner, out);
        }
        Expr::Call { callee, args } => {
            line(out, indent, "Call");
            dump_expr(callee, inner, out);
            for a in args {
                dump_expr(a, inner, out);
            }
        }
        Expr::Or(a, b) => {
            line(out, indent, "Or");
            dump_expr(a, inner, out);
            dump_expr(b, inner, out);
        }
        Expr::And(a, b) => {
            line(out, indent, "And");
            dump_expr(a, inner, out);
            dump_expr(b, inner, out);
        }
        Expr::Relational { op, lhs, rhs } => {
            line(out, indent, &format!("Relational {}", op.symbol()));
            dump_expr(lhs, inner, out);
            dump_expr(rhs, inner, out);
        }
        Expr::Arithmetic { op, lhs, rhs } => {
            line(out, indent, &format!("Arithmetic {}", op.symbol()));
            dump_expr(lhs, inner, out);
            dump_expr(rhs, inner, out);
        }
        Expr::Unary { op, operand } => {
            line(out, indent, &format!("Unary {}", op.symbol()));
            dump_expr(operand, inner, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumps_nested_arithmetic() {
        let program = Program {
            functions: vec![Function {
                name: "main".to_string(),
                params: vec![Param { name: "n".to_string(), ty: Some(TypeTag::Int) }],
                return_type: TypeTag::Void,
                body: vec![Stmt::VariableDecl(VariableDecl {
                    ty: TypeTag::Int,
                    name: "x".to_string(),
                    init: Expr::Arithmetic {
                        op: ArithOp::Add,
                        lhs: Box::new(Expr::Int(1)),
                        rhs: Box::new(Expr::GetVariable("n".to_string())),
                    },
                })],
            }],
        };
        let expected = "Program\n  Function void main(int n)\n    VariableDecl int x\n      Arithmetic +\n        Int 1\n        GetVariable n\n";
        assert_eq!(dump_program(&program), expected);
    }

    #[test]
    fn dumps_if_branches_in_order() {
        let program = Program {
            functions: vec![Function {
                name: "f".to_string(),
                params: vec![],
                return_type: TypeTag::Void,
                body: vec![Stmt::If {
                    branches: vec![
                        IfBranch { cond: Expr::Bool(true), body: vec![Stmt::Break] },
                        IfBranch { cond: Expr::Bool(false), body: vec![] },
                    ],
                    else_body: Some(vec![Stmt::Continue]),
                }],
            }],
        };
        let dump = dump_program(&program);
        let if_pos = dump.find("if:").unwrap();
        let elif_pos = dump.find("elif:").unwrap();
        let else_pos = dump.find("else:").unwrap();
        assert!(if_pos < elif_pos && elif_pos < else_pos);
        assert!(dump.contains("Continue"));
    }
}
