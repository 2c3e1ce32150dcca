fn main() {
    finance_advisor_frontend::run();
}
