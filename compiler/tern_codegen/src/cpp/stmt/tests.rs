use pretty_assertions::assert_eq;
use tern_ir::{
    BinaryOp, Case, ConstDecl, ExprKind, MethodCallKind, PostfixOp, Program, Stmt, Type, VarDecl,
};

use super::{emit_stmt, var_declaration};
use crate::context::CodegenContext;
use crate::test_helpers::{alloc, binary, double, int, local, method, null, string};
use crate::CodegenError;

fn write(program: &Program, stmt: &Stmt) -> String {
    let mut ctx = CodegenContext::new(program);
    emit_stmt(&mut ctx, stmt).unwrap_or_else(|err| panic!("emit failed: {err}"));
    ctx.take_output()
}

fn var(name: &str, ty: Type, value: Option<tern_ir::ExprId>) -> Stmt {
    Stmt::Var(VarDecl {
        name: name.to_string(),
        ty,
        value,
    })
}

/// `name++;`
fn bump(program: &mut Program, name: &str) -> Stmt {
    let operand = local(program, name, Type::I32);
    Stmt::Expr(alloc(
        program,
        ExprKind::Postfix {
            op: PostfixOp::Increment,
            operand,
        },
        Type::I32,
    ))
}

#[test]
fn variables_use_promoted_types() {
    let mut program = Program::new();
    let value = int(&mut program, 7, Type::U8);
    assert_eq!(
        write(&program, &var("b", Type::U8, Some(value))),
        "int32_t b = 7;\n"
    );
    assert_eq!(write(&program, &var("n", Type::I64, None)), "int64_t n;\n");
}

#[test]
fn owned_string_is_brace_initialized() {
    let mut program = Program::new();
    let value = string(&mut program, "hi");
    assert_eq!(
        write(&program, &var("s", Type::STRING_OWNED, Some(value))),
        "std::string s{\"hi\"};\n"
    );
    assert_eq!(
        write(&program, &var("v", Type::STRING_VIEW, Some(value))),
        "std::string_view v = \"hi\";\n"
    );
}

#[test]
fn array_storage_initializers() {
    let mut program = Program::new();
    let zero = int(&mut program, 0, Type::I32);
    let nothing = null(&mut program);
    let one = int(&mut program, 1, Type::I32);
    let ty = Type::array_storage(Type::U8, 4);
    assert_eq!(
        write(&program, &var("a", ty.clone(), Some(zero))),
        "std::array<uint8_t, 4> a {};\n"
    );
    assert_eq!(
        write(&program, &var("a", ty.clone(), Some(nothing))),
        "std::array<uint8_t, 4> a {};\n"
    );
    assert_eq!(
        write(&program, &var("a", ty.clone(), None)),
        "std::array<uint8_t, 4> a;\n"
    );

    let ctx = CodegenContext::new(&program);
    assert_eq!(
        var_declaration(&ctx, "a", &ty, Some(one)),
        Err(CodegenError::UnsupportedArrayInit {
            name: "a".to_string()
        })
    );
}

#[test]
fn if_else_chain() {
    let mut program = Program::new();
    let x = local(&mut program, "x", Type::I32);
    let zero = int(&mut program, 0, Type::I32);
    let positive = binary(&mut program, BinaryOp::Gt, x, zero, Type::Bool);
    let negative = binary(&mut program, BinaryOp::Lt, x, zero, Type::Bool);
    let a = bump(&mut program, "a");
    let b = bump(&mut program, "b");
    let c = bump(&mut program, "c");
    let stmt = Stmt::If {
        cond: positive,
        then: Box::new(Stmt::Block(vec![a])),
        otherwise: Some(Box::new(Stmt::If {
            cond: negative,
            then: Box::new(Stmt::Block(vec![b])),
            otherwise: Some(Box::new(Stmt::Block(vec![c]))),
        })),
    };
    assert_eq!(
        write(&program, &stmt),
        "if (x > 0) {\n\ta++;\n} else if (x < 0) {\n\tb++;\n} else {\n\tc++;\n}\n"
    );
}

#[test]
fn unbraced_if_else() {
    let mut program = Program::new();
    let flag = local(&mut program, "flag", Type::Bool);
    let a = bump(&mut program, "a");
    let b = bump(&mut program, "b");
    let stmt = Stmt::If {
        cond: flag,
        then: Box::new(a),
        otherwise: Some(Box::new(b)),
    };
    assert_eq!(write(&program, &stmt), "if (flag)\n\ta++;\nelse\n\tb++;\n");
}

#[test]
fn loops() {
    let mut program = Program::new();
    let i = local(&mut program, "i", Type::I32);
    let n = local(&mut program, "n", Type::I32);
    let zero = int(&mut program, 0, Type::I32);
    let below = binary(&mut program, BinaryOp::Lt, i, n, Type::Bool);
    let step = alloc(
        &mut program,
        ExprKind::Postfix {
            op: PostfixOp::Increment,
            operand: i,
        },
        Type::I32,
    );
    let body = bump(&mut program, "work");

    let for_loop = Stmt::For {
        init: Some(Box::new(var("i", Type::I32, Some(zero)))),
        cond: Some(below),
        advance: Some(step),
        body: Box::new(Stmt::Block(vec![body.clone()])),
    };
    assert_eq!(
        write(&program, &for_loop),
        "for (int32_t i = 0; i < n; i++) {\n\twork++;\n}\n"
    );

    let forever = Stmt::For {
        init: None,
        cond: None,
        advance: None,
        body: Box::new(Stmt::Break),
    };
    assert_eq!(write(&program, &forever), "for (;;)\n\tbreak;\n");

    let while_loop = Stmt::While {
        cond: below,
        body: Box::new(body.clone()),
    };
    assert_eq!(write(&program, &while_loop), "while (i < n)\n\twork++;\n");

    let do_while = Stmt::DoWhile {
        body: Box::new(Stmt::Block(vec![body])),
        cond: below,
    };
    assert_eq!(
        write(&program, &do_while),
        "do {\n\twork++;\n} while (i < n);\n"
    );
}

#[test]
fn switch_wraps_cases_declaring_locals() {
    let mut program = Program::new();
    let value = local(&mut program, "op", Type::I32);
    let one = int(&mut program, 1, Type::I32);
    let two = int(&mut program, 2, Type::I32);
    let three = int(&mut program, 3, Type::I32);
    let run = bump(&mut program, "run");
    let stmt = Stmt::Switch {
        value,
        cases: vec![
            Case {
                values: vec![one, two],
                body: vec![run, Stmt::Break],
            },
            Case {
                values: vec![three],
                body: vec![var("t", Type::I32, Some(one)), Stmt::Break],
            },
        ],
        default: Some(vec![Stmt::Throw(one)]),
    };
    assert_eq!(
        write(&program, &stmt),
        "switch (op) {\n\
         case 1:\n\
         case 2:\n\
         \trun++;\n\
         \tbreak;\n\
         case 3:\n\
         \t{\n\
         \t\tint32_t t = 1;\n\
         \t\tbreak;\n\
         \t}\n\
         default:\n\
         \tthrow std::exception();\n\
         }\n"
    );
}

#[test]
fn return_is_coerced_to_method_type() {
    let mut program = Program::new();
    let half = double(&mut program, 0.5);
    let m = method("Ratio", MethodCallKind::Normal, Type::Float, None);
    let mut ctx = CodegenContext::new(&program);
    ctx.enter_method(&m);
    emit_stmt(&mut ctx, &Stmt::Return(Some(half))).unwrap_or_else(|err| panic!("{err}"));
    ctx.leave_method();
    emit_stmt(&mut ctx, &Stmt::Return(None)).unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(ctx.take_output(), "return 0.5f;\nreturn;\n");
}

#[test]
fn local_array_const_is_static_constexpr() {
    let mut program = Program::new();
    let one = int(&mut program, 1, Type::I32);
    let two = int(&mut program, 2, Type::I32);
    let ty = Type::array_storage(Type::U8, 2);
    let table = alloc(&mut program, ExprKind::Aggregate(vec![one, two]), ty.clone());
    let stmt = Stmt::Const(ConstDecl {
        name: "table".to_string(),
        ty,
        value: table,
    });
    assert_eq!(
        write(&program, &stmt),
        "static constexpr std::array<uint8_t, 2> table = { 1, 2 };\n"
    );
}

#[test]
fn scalar_local_const_needs_no_storage() {
    let mut program = Program::new();
    let limit = int(&mut program, 8, Type::I32);
    let stmt = Stmt::Const(ConstDecl {
        name: "limit".to_string(),
        ty: Type::I32,
        value: limit,
    });
    assert_eq!(write(&program, &stmt), "");
}
